pub mod kpi_card;
pub mod price_table;
pub mod profit_banner;
pub mod toast;
pub mod type_table;
