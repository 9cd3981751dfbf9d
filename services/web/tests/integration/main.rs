mod helpers;

mod health_test;
