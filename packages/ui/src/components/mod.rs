//! Form primitives shared by the editors.

mod button;
pub use button::{Button, ButtonVariant};

mod form;
pub use form::{Checkbox, Field, Input, Label, Select, Textarea};

mod empty_state;
pub use empty_state::EmptyState;
