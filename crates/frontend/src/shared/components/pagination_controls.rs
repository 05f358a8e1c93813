use crate::shared::icons::icon;
use contracts::shared::list_query::PaginationState;
use leptos::prelude::*;

/// Элемент полосы номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    /// Текущая страница, не кликабельна
    Current(u32),
    Ellipsis,
}

/// Сжатая полоса страниц: `1 … 4 [5] 6 … 10`.
///
/// Первая страница видна при `page > 2`, левое многоточие при `page > 3`,
/// соседи текущей в пределах диапазона, правая сторона зеркальна.
/// Если сервер вернул страницу за последней, кликабельны только
/// существующие страницы: `1 … 10 [12]`.
pub fn page_strip(page: u32, total_pages: u32) -> Vec<PageSlot> {
    let mut slots = Vec::with_capacity(7);

    if total_pages > 0 && page > total_pages {
        if total_pages > 1 {
            slots.push(PageSlot::Page(1));
        }
        if total_pages > 2 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total_pages));
        slots.push(PageSlot::Current(page));
        return slots;
    }

    if page > 2 {
        slots.push(PageSlot::Page(1));
    }
    if page > 3 {
        slots.push(PageSlot::Ellipsis);
    }
    if page > 1 {
        slots.push(PageSlot::Page(page - 1));
    }
    slots.push(PageSlot::Current(page));
    if page < total_pages {
        slots.push(PageSlot::Page(page + 1));
    }
    if page.saturating_add(2) < total_pages {
        slots.push(PageSlot::Ellipsis);
    }
    if page.saturating_add(1) < total_pages {
        slots.push(PageSlot::Page(total_pages));
    }

    slots
}

/// Куда ведёт кнопка "назад"; со страницы за последней возвращает на последнюю
pub fn prev_page(page: u32, total_pages: u32) -> Option<u32> {
    if page <= 1 || total_pages == 0 {
        return None;
    }
    Some((page - 1).min(total_pages))
}

pub fn next_page(page: u32, total_pages: u32) -> Option<u32> {
    (page < total_pages).then(|| page + 1)
}

/// "11–20 из 95"
pub fn range_label(p: &PaginationState) -> String {
    if p.total == 0 {
        return "Нет записей".to_string();
    }
    let from = u64::from(p.page.saturating_sub(1)) * u64::from(p.limit) + 1;
    if from > p.total {
        return format!("Страница {} пуста, всего {}", p.page, p.total);
    }
    let to = (u64::from(p.page) * u64::from(p.limit)).min(p.total);
    format!("{}–{} из {}", from, to, p.total)
}

/// PaginationControls component - нижняя панель таблицы.
///
/// Номера страниц начинаются с 1. Выход за границы не запрашивается:
/// кнопки на краях отключены.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<PaginationState>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let total_pages = move || pagination.get().total_pages();
    let current_page = move || pagination.get().page;

    let range_info = move || pagination.with(range_label);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{range_info}</span>
            <Show when=move || { total_pages() > 0 }>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if let Some(page) = prev_page(current_page(), total_pages()) {
                            on_page_change.run(page);
                        }
                    }
                    disabled=move || prev_page(current_page(), total_pages()).is_none()
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    page_strip(current_page(), total_pages())
                        .into_iter()
                        .map(|slot| match slot {
                            PageSlot::Page(n) => view! {
                                <button class="pagination-btn" on:click=move |_| on_page_change.run(n)>
                                    {n.to_string()}
                                </button>
                            }.into_any(),
                            PageSlot::Current(n) => view! {
                                <span class="pagination-btn pagination-btn--current">{n.to_string()}</span>
                            }.into_any(),
                            PageSlot::Ellipsis => view! {
                                <span class="pagination-ellipsis">"…"</span>
                            }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if let Some(page) = next_page(current_page(), total_pages()) {
                            on_page_change.run(page);
                        }
                    }
                    disabled=move || next_page(current_page(), total_pages()).is_none()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::*;

    #[test]
    fn test_strip_middle_has_both_ellipses() {
        assert_eq!(
            page_strip(5, 10),
            vec![Page(1), Ellipsis, Page(4), Current(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_strip_first_page() {
        assert_eq!(page_strip(1, 10), vec![Current(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_strip_last_page() {
        assert_eq!(page_strip(10, 10), vec![Page(1), Ellipsis, Page(9), Current(10)]);
    }

    #[test]
    fn test_strip_near_edges_has_no_gap_ellipsis() {
        assert_eq!(page_strip(3, 5), vec![Page(1), Page(2), Current(3), Page(4), Page(5)]);
        assert_eq!(page_strip(2, 3), vec![Page(1), Current(2), Page(3)]);
    }

    #[test]
    fn test_strip_single_and_empty() {
        assert_eq!(page_strip(1, 1), vec![Current(1)]);
        assert_eq!(page_strip(1, 0), vec![Current(1)]);
    }

    #[test]
    fn test_strip_from_pagination_state() {
        let p = PaginationState {
            page: 5,
            limit: 10,
            total: 95,
        };
        let slots = page_strip(p.page, p.total_pages());
        assert_eq!(slots.first(), Some(&Page(1)));
        assert_eq!(slots.last(), Some(&Page(10)));
        assert_eq!(slots.iter().filter(|s| **s == Ellipsis).count(), 2);
    }

    #[test]
    fn test_strip_past_last_page_links_back() {
        assert_eq!(page_strip(12, 10), vec![Page(1), Ellipsis, Page(10), Current(12)]);
        assert_eq!(page_strip(4, 2), vec![Page(1), Page(2), Current(4)]);
        assert_eq!(page_strip(3, 1), vec![Page(1), Current(3)]);
        for slot in page_strip(12, 10) {
            if let Page(n) = slot {
                assert!(n >= 1 && n <= 10);
            }
        }
    }

    #[test]
    fn test_prev_next_stay_in_range() {
        assert_eq!(prev_page(1, 10), None);
        assert_eq!(prev_page(5, 10), Some(4));
        assert_eq!(prev_page(12, 10), Some(10));
        assert_eq!(next_page(10, 10), None);
        assert_eq!(next_page(12, 10), None);
        assert_eq!(next_page(3, 10), Some(4));
    }

    #[test]
    fn test_range_label() {
        let mut p = PaginationState {
            page: 2,
            limit: 10,
            total: 95,
        };
        assert_eq!(range_label(&p), "11–20 из 95");
        p.page = 10;
        assert_eq!(range_label(&p), "91–95 из 95");
        p.page = 12;
        assert_eq!(range_label(&p), "Страница 12 пуста, всего 95");
        p.total = 0;
        assert_eq!(range_label(&p), "Нет записей");
    }
}
