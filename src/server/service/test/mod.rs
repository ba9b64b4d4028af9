mod feedback;
mod profile;
mod user;
