mod image;
mod placeholder;
mod text;
