mod feedback;
mod phrase;
mod profile;
mod social;
mod user;
