pub mod option_order;

pub use option_order::OptionOrder;
