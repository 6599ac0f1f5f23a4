mod contact;
mod market;
