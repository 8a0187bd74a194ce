//! Generic grid selector.
//!
//! A [`Selector`] lays its items out row-major over a fixed number of
//! columns and tracks one 2-D cursor. W/S/A/D move the cursor (clamped,
//! never wrapping) and Space confirms the cell under it. Confirmation calls
//! the selection handler with the flat index, the full item list and a
//! caller-supplied context; the index is also returned so callers can react
//! without a handler.
//!
//! The flat index is `x + y * columns` and may point past the last item when
//! the bottom row is partial. Handlers must check it.

use std::any::Any;
use std::fmt;

use crate::input::{Key, Keyboard};
use crate::render::{Canvas, Colour, RenderError};

/// Called with `(index, items, context)` when the player confirms a cell.
pub type SelectionHandler<T, C> = Box<dyn FnMut(usize, &[T], &mut C)>;

/// Called with `(canvas, x, y, item)` once per occupied cell.
pub type CellRenderer<T> = Box<dyn Fn(&mut dyn Canvas, u16, u16, &T) -> Result<(), RenderError>>;

/// Placement and cursor configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorLayout {
    pub x: u16,
    pub y: u16,
    pub columns: u16,
    pub current_x: u16,
    pub current_y: u16,
    pub spacing_x: u16,
    pub spacing_y: u16,
    pub cursor: String,
}

impl Default for SelectorLayout {
    fn default() -> Self {
        Self {
            x: 20,
            y: 10,
            columns: 1,
            current_x: 0,
            current_y: 0,
            spacing_x: 20,
            spacing_y: 5,
            cursor: "->".to_owned(),
        }
    }
}

impl SelectorLayout {
    /// Single column at `(x, y)` with one-line rows.
    pub fn list(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            spacing_y: 1,
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_spacing(mut self, spacing_x: u16, spacing_y: u16) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }
}

pub struct Selector<T: 'static, C = ()> {
    data: Vec<T>,
    layout: SelectorLayout,
    rows: u16,
    cursor_visible: bool,
    on_select: Option<SelectionHandler<T, C>>,
    render_cell: Option<CellRenderer<T>>,
}

impl<T: 'static, C> fmt::Debug for Selector<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("len", &self.data.len())
            .field("layout", &self.layout)
            .field("rows", &self.rows)
            .field("cursor_visible", &self.cursor_visible)
            .finish_non_exhaustive()
    }
}

impl<T: 'static, C> Selector<T, C> {
    pub fn new(data: Vec<T>, mut layout: SelectorLayout) -> Self {
        layout.columns = layout.columns.max(1);
        let mut selector = Self {
            data,
            layout,
            rows: 1,
            cursor_visible: true,
            on_select: None,
            render_cell: None,
        };
        selector.refresh_bounds();
        selector
    }

    pub fn with_selection_handler(
        mut self,
        handler: impl FnMut(usize, &[T], &mut C) + 'static,
    ) -> Self {
        self.set_selection_handler(handler);
        self
    }

    pub fn with_cell_renderer(
        mut self,
        renderer: impl Fn(&mut dyn Canvas, u16, u16, &T) -> Result<(), RenderError> + 'static,
    ) -> Self {
        self.set_cell_renderer(renderer);
        self
    }

    pub fn set_selection_handler(&mut self, handler: impl FnMut(usize, &[T], &mut C) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    pub fn set_cell_renderer(
        &mut self,
        renderer: impl Fn(&mut dyn Canvas, u16, u16, &T) -> Result<(), RenderError> + 'static,
    ) {
        self.render_cell = Some(Box::new(renderer));
    }

    /// Replace the backing items; rows are recomputed and the cursor clamped.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.refresh_bounds();
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn layout(&self) -> &SelectorLayout {
        &self.layout
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.layout.columns
    }

    /// Cursor as `(column, row)`.
    pub fn cursor(&self) -> (u16, u16) {
        (self.layout.current_x, self.layout.current_y)
    }

    /// Flat row-major index under the cursor. May be `>= data().len()`.
    pub fn index(&self) -> usize {
        usize::from(self.layout.current_x)
            + usize::from(self.layout.current_y) * usize::from(self.layout.columns)
    }

    /// Item under the cursor, if the cell is occupied.
    pub fn selected(&self) -> Option<&T> {
        self.data.get(self.index())
    }

    pub fn reset_cursor(&mut self) {
        self.layout.current_x = 0;
        self.layout.current_y = 0;
    }

    pub fn show_cursor(&mut self) {
        self.cursor_visible = true;
    }

    pub fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Apply at most one action for this frame.
    ///
    /// Returns the confirmed flat index when Space was pressed.
    pub fn process_inputs(&mut self, keyboard: &Keyboard, context: &mut C) -> Option<usize> {
        if keyboard.is_key_just_pressed(Key::W) {
            self.layout.current_y = self.layout.current_y.saturating_sub(1);
        } else if keyboard.is_key_just_pressed(Key::S) {
            if self.layout.current_y + 1 < self.rows {
                self.layout.current_y += 1;
            }
        } else if keyboard.is_key_just_pressed(Key::A) {
            self.layout.current_x = self.layout.current_x.saturating_sub(1);
        } else if keyboard.is_key_just_pressed(Key::D) {
            if self.layout.current_x + 1 < self.layout.columns {
                self.layout.current_x += 1;
            }
        } else if keyboard.is_key_just_pressed(Key::Space) {
            let index = self.index();
            if let Some(handler) = self.on_select.as_mut() {
                handler(index, &self.data, context);
            }
            return Some(index);
        }
        None
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        self.draw_rows(canvas, self.rows)
    }

    /// Draw at most `max_rows` rows, scrolled just far enough that the
    /// cursor row is among them.
    pub fn draw_rows(&self, canvas: &mut dyn Canvas, max_rows: u16) -> Result<(), RenderError> {
        if self.data.is_empty() || max_rows == 0 {
            return Ok(());
        }

        let layout = &self.layout;
        let cursor_width = layout.cursor.chars().count();
        let visible = max_rows.min(self.rows);
        let first_row = layout.current_y.saturating_sub(visible - 1);
        for row in first_row..first_row + visible {
            for column in 0..layout.columns {
                let cell_x = layout.x + column * layout.spacing_x;
                let cell_y = layout.y + (row - first_row) * layout.spacing_y;

                if (column, row) == self.cursor() {
                    let cursor_x = cell_x.saturating_sub(cursor_width as u16);
                    if self.cursor_visible {
                        canvas.write(cursor_x, cell_y, &layout.cursor, Colour::Red)?;
                    } else {
                        canvas.write(cursor_x, cell_y, &" ".repeat(cursor_width), Colour::White)?;
                    }
                }

                let index = usize::from(column) + usize::from(row) * usize::from(layout.columns);
                if let Some(item) = self.data.get(index) {
                    match &self.render_cell {
                        Some(render) => render(canvas, cell_x, cell_y, item)?,
                        None => draw_text_cell(canvas, cell_x, cell_y, item)?,
                    }
                }
            }
        }
        Ok(())
    }

    fn refresh_bounds(&mut self) {
        let columns = usize::from(self.layout.columns);
        let rows = self.data.len().div_ceil(columns).max(1);
        self.rows = u16::try_from(rows).unwrap_or(u16::MAX);
        self.layout.current_x = self.layout.current_x.min(self.layout.columns - 1);
        self.layout.current_y = self.layout.current_y.min(self.rows - 1);
    }
}

fn draw_text_cell<T: 'static>(
    canvas: &mut dyn Canvas,
    x: u16,
    y: u16,
    item: &T,
) -> Result<(), RenderError> {
    let item = item as &dyn Any;
    if let Some(text) = item.downcast_ref::<String>() {
        canvas.write(x, y, text, Colour::White)
    } else if let Some(text) = item.downcast_ref::<&'static str>() {
        canvas.write(x, y, text, Colour::White)
    } else {
        tracing::error!(
            item_type = std::any::type_name::<T>(),
            "no cell renderer for selector item type"
        );
        Ok(())
    }
}
