mod events;
mod visibility;
