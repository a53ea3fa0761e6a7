//! Window frontends for presenting `tg` renders on screen.

pub mod minifb;
