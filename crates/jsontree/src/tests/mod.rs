mod numbers;
mod parse_good;
mod property_roundtrip;
