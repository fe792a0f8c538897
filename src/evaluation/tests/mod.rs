mod common;
mod skills;
