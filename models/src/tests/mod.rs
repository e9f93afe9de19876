mod api_error;
mod durations;
mod enums;
