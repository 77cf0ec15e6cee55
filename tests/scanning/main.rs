mod caching;
mod document;
mod golden;
