mod account;
mod alert_contacts;
mod helpers;
mod maintenance_windows;
mod monitors;
mod status_pages;
mod transport;
