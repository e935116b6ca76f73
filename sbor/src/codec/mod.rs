// These modules contain only trait impls for the std types, so nothing is re-exported.
mod array;
mod boolean;
mod collection;
mod integer;
mod misc;
mod option;
mod result;
mod string;
mod tuple;
