//! Client-side pagination shared by every list view.

/// One page of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the requested page; empty when the page is out of range.
    pub items: &'a [T],
    /// `ceil(len / page_size)`.
    pub total_pages: usize,
}

/// Slice `items` into the 1-based `page`. No clamping is applied: pages past
/// the end (and page `0`) are empty. A zero `page_size` yields an empty page
/// with no pages.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    if page_size == 0 {
        return Page {
            items: &[],
            total_pages: 0,
        };
    }
    let total_pages = items.len().div_ceil(page_size);
    let slice = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < items.len())
        .map_or(&[][..], |start| {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        });
    Page {
        items: slice,
        total_pages,
    }
}

/// Clamp a requested page into `1..=total_pages` (or `1` when empty).
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The page to show for a requested `page` once `items` may have shrunk,
/// e.g. after a refetch removed the last row of the final page.
#[must_use]
pub fn page_in_range<T>(items: &[T], page: usize, page_size: usize) -> usize {
    let total_pages = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };
    clamp_page(page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_items_make_three_pages() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[21, 22, 23]);
        assert!(paginate(&items, 4, 10).items.is_empty());
    }

    #[test]
    fn pages_reassemble_the_collection_in_order() {
        for len in [0_usize, 1, 9, 10, 11, 37] {
            let items: Vec<usize> = (0..len).collect();
            for size in [1_usize, 3, 10] {
                let total = paginate(&items, 1, size).total_pages;
                assert_eq!(total, len.div_ceil(size));
                let mut rebuilt = Vec::new();
                for number in 1..=total {
                    let page = paginate(&items, number, size);
                    assert!(page.items.len() <= size);
                    rebuilt.extend_from_slice(page.items);
                }
                assert_eq!(rebuilt, items);
            }
        }
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_page_and_zero_size_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 2).items.is_empty());
        assert_eq!(paginate(&items, 0, 2).total_pages, 2);
        let page = paginate(&items, 1, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn shrunk_list_falls_back_to_last_page() {
        let before: Vec<u32> = (1..=11).collect();
        assert_eq!(page_in_range(&before, 2, 10), 2);

        let after = &before[..10];
        let page_no = page_in_range(after, 2, 10);
        assert_eq!(page_no, 1);
        assert_eq!(paginate(after, page_no, 10).items.len(), 10);

        let three: Vec<u32> = (1..=25).collect();
        let two = &three[..20];
        let page_no = page_in_range(two, 3, 10);
        assert_eq!(page_no, 2);
        assert_eq!(paginate(two, page_no, 10).items, &three[10..20]);

        let none: [u32; 0] = [];
        assert_eq!(page_in_range(&none, 4, 10), 1);
        assert_eq!(page_in_range(&three, 2, 0), 1);
    }
}
