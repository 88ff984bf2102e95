mod booking;
mod favorite;
mod kos;
mod photo;
mod review;
mod stats;
mod user;
