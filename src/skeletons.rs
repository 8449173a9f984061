//! Canned document texts and the per-language skeleton table used when
//! creating a fresh scratch paper.

use crate::model::Contributor;

pub const README_MD: &str = r#"# Algorithm Visualizer

Algorithm Visualizer is an interactive way to see algorithms at work from
real code. Pick an algorithm from the navigator to read its description and
step through its visualization, or open a scratch paper and write your own.

## Contributing

Algorithms you author as scratch papers are stored as gists under your own
account. Sign in to list, edit, and share them.
"#;

pub const SCRATCH_PAPER_MD: &str = r#"# Untitled

Write a description of your algorithm here. The first paragraph after the
heading is shown as the workspace description.
"#;

pub struct Language {
    pub name: &'static str,
    pub ext: &'static str,
    pub skeleton: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        name: "JavaScript",
        ext: "js",
        skeleton: "// import visualization libraries here\n\nfunction main() {\n  // your code here\n}\n\nmain();\n",
    },
    Language {
        name: "C++",
        ext: "cpp",
        skeleton: "#include <iostream>\n\nint main() {\n  // your code here\n  return 0;\n}\n",
    },
    Language {
        name: "Java",
        ext: "java",
        skeleton: "public class Main {\n  public static void main(String[] args) {\n    // your code here\n  }\n}\n",
    },
    Language {
        name: "Python",
        ext: "py",
        skeleton: "def main():\n    # your code here\n    pass\n\n\nif __name__ == \"__main__\":\n    main()\n",
    },
];

/// Extensions recognized as executable/source files, in tab-selection
/// preference order.
pub const EXECUTABLE_EXTS: &[&str] = &["js", "cpp", "java", "py"];

pub fn skeleton_for(ext: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.ext == ext).map(|l| l.skeleton)
}

/// Last dot-separated segment of a file name. A name without a dot yields the
/// whole name, so `extension("untitled")` is `"untitled"`.
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Attribution attached to the bundled welcome document.
pub fn maintainers() -> Vec<Contributor> {
    vec![Contributor {
        login: "algorithm-visualizer".to_string(),
        avatar_url: "https://github.com/algorithm-visualizer.png".to_string(),
    }]
}
