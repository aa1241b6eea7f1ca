pub mod common;
pub mod u501_scan_card;
pub mod u502_predict_price;
