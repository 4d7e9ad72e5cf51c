// Client-view state: detail-pane selection and search debounce. Driven by
// explicit events so it stays independent of any UI toolkit.

pub mod debounce;
pub mod selection;
