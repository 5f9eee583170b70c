pub mod use_analytics;
pub mod use_dashboard;
pub mod use_session;
pub mod use_station_detail;
pub mod use_stations;
