pub mod checkbox_group;

pub use checkbox_group::CheckboxGroup;
