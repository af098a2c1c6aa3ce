//! Stand-in page for business sections that are not built yet.

use leptos::prelude::*;

use crate::util::navigation::Section;

#[must_use]
pub fn placeholder_text(section: Section) -> String {
    format!("Halaman {} (Coming Soon)", section.page_title())
}

#[component]
pub fn PlaceholderPage(section: Section) -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <p>{placeholder_text(section)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_text_names_the_section() {
        assert_eq!(placeholder_text(Section::Products), "Halaman Produk (Coming Soon)");
        assert_eq!(placeholder_text(Section::Reports), "Halaman Laporan (Coming Soon)");
    }
}
