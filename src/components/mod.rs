pub mod analytics;
pub mod crowd_chart;
pub mod dashboard;
pub mod header;
pub mod login;
pub mod prediction_chart;
pub mod register;
pub mod report_form;
pub mod station_card;
pub mod station_detail;
pub mod station_list;
pub mod status;
pub mod trend_chart;

pub use header::{Header, NavTarget};
pub use report_form::ReportForm;
pub use status::{ErrorNotice, LoadingIndicator};
