pub mod geo_utils;
