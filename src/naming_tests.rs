#[cfg(test)]
mod tests {
    use crate::check::MIR_MISSING_SEPARATOR;
    use crate::naming::{transform, EXCEPTIONS};

    #[test]
    fn test_plain_camel_case_names() {
        assert_eq!(transform("CXCursor_ConstAttr").unwrap(), "CONST_ATTR");
        assert_eq!(transform("CXCursor_StructDecl").unwrap(), "STRUCT_DECL");
        assert_eq!(transform("CXCursor_InvalidFile").unwrap(), "INVALID_FILE");
    }

    #[test]
    fn test_acronym_markers_stay_whole_words() {
        assert_eq!(
            transform("CXCursor_ObjCInterfaceDecl").unwrap(),
            "OBJC_INTERFACE_DECL"
        );
        assert_eq!(
            transform("CXCursor_ObjCSuperClassRef").unwrap(),
            "OBJC_SUPER_CLASS_REF"
        );
        assert_eq!(transform("CXCursor_CXXMethod").unwrap(), "CXX_METHOD");
        assert_eq!(transform("CXCursor_SEHTryStmt").unwrap(), "SEH_TRY_STMT");
        assert_eq!(transform("CXCursor_GNUNullExpr").unwrap(), "GNU_NULL_EXPR");
        assert_eq!(transform("CXCursor_IBActionAttr").unwrap(), "IB_ACTION_ATTR");
    }

    #[test]
    fn test_compound_word_pinning() {
        // Not in the exception table; exercises the ParallelForSimd pin.
        assert_eq!(
            transform("CXCursor_OMPParallelForSimdDirective").unwrap(),
            "OMP_PARALLELFORSIMD_DIRECTIVE"
        );
    }

    #[test]
    fn test_port_suffix_disambiguation() {
        assert_eq!(transform("CXCursor_DLLImport").unwrap(), "DLLIMPORT_ATTR");
        assert_eq!(transform("CXCursor_DLLExport").unwrap(), "DLLEXPORT_ATTR");
    }

    #[test]
    fn test_exception_entries_always_win() {
        for (native, expected) in EXCEPTIONS {
            assert_eq!(&transform(native).unwrap(), expected, "for {}", native);
        }
    }

    #[test]
    fn test_exception_overrides_the_algorithmic_result() {
        // The systematic transform would say OBJC_BOOL_LITERAL_EXPR and
        // NON_TYPE_TEMPLATE_PARAMETER; the registered mirror does not.
        assert_eq!(
            transform("CXCursor_ObjCBoolLiteralExpr").unwrap(),
            "OBJ_BOOL_LITERAL_EXPR"
        );
        assert_eq!(
            transform("CXCursor_NonTypeTemplateParameter").unwrap(),
            "TEMPLATE_NON_TYPE_PARAMETER"
        );
    }

    #[test]
    fn test_transform_is_deterministic() {
        for name in [
            "CXCursor_ConstAttr",
            "CXCursor_ObjCInterfaceDecl",
            "CXCursor_OMPParallelForDirective",
            "CXCursor_DLLImport",
        ] {
            assert_eq!(transform(name).unwrap(), transform(name).unwrap());
        }
    }

    #[test]
    fn test_missing_separator_is_a_structural_violation() {
        let err = transform("Unprefixed").unwrap_err();
        assert_eq!(err.code, MIR_MISSING_SEPARATOR);

        let err = transform("").unwrap_err();
        assert_eq!(err.code, MIR_MISSING_SEPARATOR);
    }

    #[test]
    fn test_prefix_is_dropped_whatever_it_spells() {
        // Only the text after the first separator is transformed.
        assert_eq!(transform("CXType_FunctionProto").unwrap(), "FUNCTION_PROTO");
        assert_eq!(transform("X_AbcDef").unwrap(), "ABC_DEF");
    }
}
