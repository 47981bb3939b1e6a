mod autocomplete_render;
mod autocomplete_state;

pub use autocomplete_render::render_popup;
pub use autocomplete_state::AutocompleteState;
