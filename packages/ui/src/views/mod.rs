mod builder;
pub use builder::BuilderView;
