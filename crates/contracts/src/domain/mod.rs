pub mod a030_car_transmission;
pub mod common;
