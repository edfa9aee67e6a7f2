pub mod template_catalog_embedded;
