mod canned;
mod client_error;
mod config;
mod decode;
mod diff;
mod encode;
mod gateway;
