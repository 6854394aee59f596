pub trait Id {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub cursor: Option<i64>,
    pub page_size: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

pub trait Paginator: Sized {
    fn get_pager<T: Id>(&self, data: &mut Vec<T>) -> Pager;
}

impl Paginator for PageInfo {
    /// `data` is expected to hold up to `page_size + 1` rows; the extra row
    /// only signals that another page exists and is dropped here.
    fn get_pager<T: Id>(&self, data: &mut Vec<T>) -> Pager {
        let has_next = data.len() as i64 > self.page_size;
        if has_next {
            data.truncate(self.page_size as usize);
        }

        let next = if has_next {
            data.last().map(|d| d.id())
        } else {
            None
        };
        // paging back is done by flipping the sort direction from this id
        let prev = match self.cursor {
            Some(_) => data.first().map(|d| d.id()),
            None => None,
        };

        Pager { prev, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestId(i64);

    impl Id for TestId {
        fn id(&self) -> i64 {
            self.0
        }
    }

    fn generate_test_ids(start: i64, end: i64) -> Vec<TestId> {
        (start..=end).map(TestId).collect()
    }

    #[test]
    fn paginator_should_work_for_first_page() {
        let page = PageInfo {
            cursor: None,
            page_size: 10,
        };

        let mut items = generate_test_ids(1, 11);
        let pager = page.get_pager(&mut items);
        assert_eq!(pager.prev, None);
        assert_eq!(pager.next, Some(10));
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn paginator_should_work_for_middle_page() {
        let page = PageInfo {
            cursor: Some(10),
            page_size: 10,
        };

        let mut items = generate_test_ids(11, 21);
        let pager = page.get_pager(&mut items);
        assert_eq!(pager.prev, Some(11));
        assert_eq!(pager.next, Some(20));
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn paginator_should_work_for_last_page() {
        let page = PageInfo {
            cursor: Some(20),
            page_size: 10,
        };

        let mut items = generate_test_ids(21, 25);
        let pager = page.get_pager(&mut items);
        assert_eq!(pager.prev, Some(21));
        assert_eq!(pager.next, None);
        assert_eq!(items.len(), 5);
    }
}
