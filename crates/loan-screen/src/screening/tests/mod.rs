mod common;

mod crime;
