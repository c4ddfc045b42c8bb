pub mod use_rate_table;
