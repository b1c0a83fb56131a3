//===========================================================================//

macro_rules! out_of_range {
    ($what:expr, $index:expr, $limit:expr) => {
        return Err($crate::error::IconError::IndexOutOfRange {
            what: $what,
            index: $index as usize,
            limit: $limit as usize,
        })
    };
}

macro_rules! invalid_image {
    ($e:expr) => {
        return Err($crate::error::IconError::InvalidImage($e.to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::IconError::InvalidImage(
            format!($fmt, $($arg)+)))
    };
}

//===========================================================================//
