use leptos::prelude::*;
use std::sync::Arc;

pub type CellRenderer<T> = Arc<dyn Fn(&T, usize) -> AnyView + Send + Sync>;
pub type RowActions<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Описание колонки таблицы.
///
/// `key` одновременно поле сортировки/фильтра и поле строки,
/// которое выводится, если у колонки нет своего `render`.
pub struct ColumnSpec<T> {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    /// Выравнивание (left/right)
    pub align: &'static str,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T> ColumnSpec<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            filterable: false,
            align: "left",
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }

    pub fn render(mut self, f: impl Fn(&T, usize) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }
}

pub fn row_actions<T>(f: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> RowActions<T> {
    Arc::new(f)
}
