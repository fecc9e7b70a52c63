pub mod currency_feed;
