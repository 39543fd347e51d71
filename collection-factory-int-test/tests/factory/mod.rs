mod configure_test;
mod create_test;
mod drop_test;
mod explicit_test;
