pub mod homework;

pub use homework::{Homework, HOMEWORK_VERDICTS};
