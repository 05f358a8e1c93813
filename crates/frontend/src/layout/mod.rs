pub mod center;
pub mod global_context;
pub mod left;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Каркас консоли:
/// ```text
/// +------------------------------------------+
/// |  ☰  PIM                                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    class="top-header__toggle"
                    title="Скрыть/показать меню"
                    on:click=move |_| ctx.toggle_left()
                >
                    "☰"
                </button>
                <span class="top-header__title">"PIM"</span>
            </header>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
