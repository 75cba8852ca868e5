use crate::error::ApiError;

pub const MAX_PAGE_SIZE: u32 = 50;
const MAX_PAGE: u32 = 10_000;

pub fn validate_pagination(page: u32, page_size: u32) -> Result<(u32, u32), ApiError> {
    if !(1..=MAX_PAGE).contains(&page) {
        return Err(ApiError::BadRequest(format!(
            "page must be between 1 and {MAX_PAGE}"
        )));
    }

    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(ApiError::BadRequest(format!(
            "pageSize must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    Ok((page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(validate_pagination(1, 1).unwrap(), (1, 1));
        assert_eq!(validate_pagination(MAX_PAGE, MAX_PAGE_SIZE).unwrap(), (MAX_PAGE, MAX_PAGE_SIZE));
    }

    #[test]
    fn rejects_zero_page_and_oversized_pages() {
        assert!(matches!(validate_pagination(0, 5), Err(ApiError::BadRequest(_))));
        assert!(matches!(validate_pagination(1, 0), Err(ApiError::BadRequest(_))));
        assert!(matches!(
            validate_pagination(1, MAX_PAGE_SIZE + 1),
            Err(ApiError::BadRequest(_))
        ));
    }
}
