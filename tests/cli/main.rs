#[path = "../harness/mod.rs"]
mod harness;

mod check {
    mod fails_on_violated_order_rule_contract;
    mod passes_reference_manifest_contract;
    mod reports_unsatisfiable_constraint_contract;
    mod strict_promotes_warnings_contract;
}

mod diff {
    mod appending_is_not_reorder_contract;
    mod deny_reorder_flags_swap_contract;
}

mod eval {
    mod eventlet_exclusion_contract;
    mod rejects_undeclared_package_contract;
}

mod fmt {
    mod check_mode_reports_without_writing_contract;
    mod rewrites_to_canonical_form_contract;
}

mod init {
    mod rejects_existing_manifest_contract;
    mod writes_reference_template_contract;
}

mod list {
    mod json_output_contract;
    mod text_output_preserves_order_contract;
}

mod templates {
    mod lists_bundled_templates_contract;
}

mod global {
    mod file_resolution_contract;
    mod short_aliases_contract;
}
