pub mod category_chart;
pub mod layout;
pub mod pie_chart;
pub mod surface;
