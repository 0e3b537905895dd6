pub mod a030_car_transmission;
