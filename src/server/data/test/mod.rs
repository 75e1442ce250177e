mod character;
mod character_fav;
mod planet;
mod planet_fav;
mod user;
