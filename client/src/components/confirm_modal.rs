//! Yes/no confirmation dialog guarding destructive actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_owned());
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <h3 class="modal__title">{title.clone()}</h3>
                    <p class="modal__message">{move || message.get()}</p>
                    <div class="modal__actions">
                        <button class="btn btn--secondary" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" type="button" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
