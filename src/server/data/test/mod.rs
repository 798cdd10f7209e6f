mod car;
mod order;
