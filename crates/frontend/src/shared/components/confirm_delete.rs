use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::list_page::state::DeleteWorkflowState;
use crate::shared::modal::Modal;

/// Диалог подтверждения удаления, управляемый контроллером списка.
///
/// Пока запрос на удаление в полёте, кнопки заблокированы.
#[component]
pub fn ConfirmDeleteModal(
    #[prop(into)]
    state: Signal<DeleteWorkflowState>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_deleting = Signal::derive(move || state.with(|s| s.is_deleting));

    view! {
        <Show when=move || state.with(|s| s.is_open)>
            <Modal
                title="Удаление записи"
                on_close=on_cancel
                action_buttons=Arc::new(move || view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=is_deleting
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=is_deleting
                        loading=is_deleting
                    >
                        "Удалить"
                    </Button>
                }.into_any())
            >
                <p>
                    "Удалить «"
                    {move || state.with(|s| s.target_display_name.clone())}
                    "»? Это действие нельзя отменить."
                </p>
            </Modal>
        </Show>
    }
}
