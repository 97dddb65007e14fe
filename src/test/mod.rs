mod fields;
mod normalize;
