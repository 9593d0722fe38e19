mod creating;
mod retrieving;
