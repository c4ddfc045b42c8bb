//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like inputs, buttons, and cards.
pub mod currency_input;
pub mod pico;
