mod answer;
mod common;
