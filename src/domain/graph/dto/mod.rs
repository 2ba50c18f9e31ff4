pub mod chart_image;
pub mod filter_parameter_set;
pub mod metric_query;
pub mod monitored_object;
pub mod presentation_params;
