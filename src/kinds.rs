//! Closed token sets used by attributes of the index, compound and configuration documents.

use crate::values::string_enum;

string_enum! {
    /// Kind of a documented compound (class, file, namespace, page, ...).
    pub enum CompoundKind ("compound kind") {
        Class => "class",
        Struct => "struct",
        Union => "union",
        Interface => "interface",
        Protocol => "protocol",
        Category => "category",
        Exception => "exception",
        Service => "service",
        Singleton => "singleton",
        Module => "module",
        Type => "type",
        File => "file",
        Namespace => "namespace",
        Group => "group",
        Page => "page",
        Example => "example",
        Dir => "dir",
        Concept => "concept",
    }
}

string_enum! {
    pub enum MemberKind ("member kind") {
        Define => "define",
        Property => "property",
        Event => "event",
        Variable => "variable",
        Typedef => "typedef",
        Enum => "enum",
        EnumValue => "enumvalue",
        Function => "function",
        Signal => "signal",
        Prototype => "prototype",
        Friend => "friend",
        Dcop => "dcop",
        Slot => "slot",
        Interface => "interface",
        Service => "service",
        Sequence => "sequence",
        Dictionary => "dictionary",
    }
}

string_enum! {
    pub enum Protection ("protection kind") {
        Public => "public",
        Protected => "protected",
        Private => "private",
        Package => "package",
    }
}

string_enum! {
    pub enum Virtualness ("virtual kind") {
        NonVirtual => "non-virtual",
        Virtual => "virtual",
        PureVirtual => "pure-virtual",
    }
}

string_enum! {
    pub enum RefQualifier ("reference qualifier") {
        LValue => "lvalue",
        RValue => "rvalue",
    }
}

string_enum! {
    pub enum Language ("language") {
        Unknown => "Unknown",
        Idl => "IDL",
        Java => "Java",
        CSharp => "C#",
        D => "D",
        Php => "PHP",
        ObjectiveC => "Objective-C",
        Cpp => "C++",
        JavaScript => "JavaScript",
        Python => "Python",
        Fortran => "Fortran",
        Vhdl => "VHDL",
        Xml => "XML",
        Sql => "SQL",
        Markdown => "Markdown",
        Slice => "Slice",
        Lex => "Lex",
    }
}

string_enum! {
    /// Groups members of a compound by visibility and kind.
    pub enum SectionKind ("section kind") {
        UserDefined => "user-defined",
        PublicType => "public-type",
        PublicFunc => "public-func",
        PublicAttrib => "public-attrib",
        PublicSlot => "public-slot",
        Signal => "signal",
        DcopFunc => "dcop-func",
        Property => "property",
        Event => "event",
        PublicStaticFunc => "public-static-func",
        PublicStaticAttrib => "public-static-attrib",
        ProtectedType => "protected-type",
        ProtectedFunc => "protected-func",
        ProtectedAttrib => "protected-attrib",
        ProtectedSlot => "protected-slot",
        ProtectedStaticFunc => "protected-static-func",
        ProtectedStaticAttrib => "protected-static-attrib",
        PackageType => "package-type",
        PackageFunc => "package-func",
        PackageAttrib => "package-attrib",
        PackageStaticFunc => "package-static-func",
        PackageStaticAttrib => "package-static-attrib",
        PrivateType => "private-type",
        PrivateFunc => "private-func",
        PrivateAttrib => "private-attrib",
        PrivateSlot => "private-slot",
        PrivateStaticFunc => "private-static-func",
        PrivateStaticAttrib => "private-static-attrib",
        Friend => "friend",
        Related => "related",
        Define => "define",
        Prototype => "prototype",
        Typedef => "typedef",
        Sequence => "sequence",
        Dictionary => "dictionary",
        Enum => "enum",
        Func => "func",
        Var => "var",
        Interfaces => "interfaces",
        Services => "services",
        Events => "events",
        Properties => "properties",
    }
}

string_enum! {
    pub enum RefKind ("reference kind") {
        Compound => "compound",
        Member => "member",
    }
}

string_enum! {
    pub enum HighlightClass ("highlight class") {
        Comment => "comment",
        Normal => "normal",
        Preprocessor => "preprocessor",
        Keyword => "keyword",
        KeywordType => "keywordtype",
        KeywordFlow => "keywordflow",
        StringLiteral => "stringliteral",
        XmlCdata => "xmlcdata",
        CharLiteral => "charliteral",
        VhdlKeyword => "vhdlkeyword",
        VhdlLogic => "vhdllogic",
        VhdlChar => "vhdlchar",
        VhdlDigit => "vhdldigit",
    }
}

string_enum! {
    pub enum SimpleSectKind ("simple section kind") {
        See => "see",
        Return => "return",
        Author => "author",
        Authors => "authors",
        Version => "version",
        Since => "since",
        Date => "date",
        Note => "note",
        Warning => "warning",
        Pre => "pre",
        Post => "post",
        Copyright => "copyright",
        Invariant => "invariant",
        Remark => "remark",
        Attention => "attention",
        Important => "important",
        Par => "par",
        Rcs => "rcs",
    }
}

string_enum! {
    pub enum CheckState ("check state") {
        Checked => "checked",
        Unchecked => "unchecked",
    }
}

string_enum! {
    /// Output format an `<image>` is meant for.
    pub enum ImageKind ("image kind") {
        Html => "html",
        Latex => "latex",
        Docbook => "docbook",
        Rtf => "rtf",
        Xml => "xml",
    }
}

string_enum! {
    pub enum PlantumlEngine ("plantuml engine") {
        Uml => "uml",
        Bpm => "bpm",
        Wire => "wire",
        Dot => "dot",
        Ditaa => "ditaa",
        Salt => "salt",
        Math => "math",
        Latex => "latex",
        Gantt => "gantt",
        Mindmap => "mindmap",
        Jcckit => "jcckit",
        Json => "json",
        Yaml => "yaml",
        Creole => "creole",
        Flow => "flow",
        Board => "board",
        Git => "git",
        Hcl => "hcl",
        Regex => "regex",
        Ebnf => "ebnf",
        Files => "files",
        Chen => "chen",
        Chronology => "chronology",
    }
}

string_enum! {
    pub enum ParamListKind ("parameter list kind") {
        Param => "param",
        RetVal => "retval",
        Exception => "exception",
        TemplateParam => "templateparam",
    }
}

string_enum! {
    pub enum ParamDirection ("parameter direction") {
        In => "in",
        Out => "out",
        InOut => "inout",
    }
}

string_enum! {
    pub enum Accessor ("accessor") {
        Retain => "retain",
        Copy => "copy",
        Assign => "assign",
        Weak => "weak",
        Strong => "strong",
        Unretained => "unretained",
    }
}

string_enum! {
    pub enum Align ("alignment") {
        Left => "left",
        Right => "right",
        Center => "center",
    }
}

string_enum! {
    pub enum VerticalAlign ("vertical alignment") {
        Bottom => "bottom",
        Top => "top",
        Middle => "middle",
    }
}

string_enum! {
    /// Numbering style of an ordered list.
    pub enum OrderedListType ("ordered list type") {
        Decimal => "1",
        LowerAlpha => "a",
        UpperAlpha => "A",
        LowerRoman => "i",
        UpperRoman => "I",
    }
}

string_enum! {
    pub enum GraphRelation ("graph relation") {
        Include => "include",
        Usage => "usage",
        TemplateInstance => "template-instance",
        PublicInheritance => "public-inheritance",
        ProtectedInheritance => "protected-inheritance",
        PrivateInheritance => "private-inheritance",
        TypeConstraint => "type-constraint",
    }
}

string_enum! {
    /// Value type of a configuration option.
    pub enum OptionType ("option type") {
        Int => "int",
        Bool => "bool",
        String => "string",
        StringList => "stringlist",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::AttributeValue;

    #[test]
    fn tokens_round_trip_through_display() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::convert(kind.as_str()), Some(*kind));
        }
        for kind in MemberKind::ALL {
            assert_eq!(MemberKind::convert(&kind.to_string()), Some(*kind));
        }
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(Language::convert("C++"), Some(Language::Cpp));
        assert_eq!(Language::convert("c++"), None);
        assert_eq!(OrderedListType::convert("A"), Some(OrderedListType::UpperAlpha));
        assert_eq!(OrderedListType::convert("a"), Some(OrderedListType::LowerAlpha));
    }
}
