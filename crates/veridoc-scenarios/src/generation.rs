//! Reference documents for the generation scenarios.
//!
//! Each factory assembles the SPDX 2.3 document a generator under test is
//! expected to produce for the scenario. Documents are plain data; all
//! share the basic document skeleton.

use serde_json::{json, Value};
use veridoc_types::Node;

const SHA1_VALUE: &str = "d6a770ba38583ed4bb4525bd96e50461655d2758";

fn basic_document(name: &str) -> Value {
    json!({
        "SPDXID": "SPDXRef-DOCUMENT",
        "spdxVersion": "SPDX-2.3",
        "dataLicense": "CC0-1.0",
        "name": name,
        "documentNamespace": "https://some.namespace",
        "creationInfo": {
            "created": "2022-01-01T00:00:00Z",
            "creators": ["Tool: test-tool"]
        }
    })
}

fn sha1_checksum() -> Value {
    json!({"algorithm": "SHA1", "checksumValue": SHA1_VALUE})
}

fn merge(mut base: Value, extra: Value) -> Node {
    if let (Some(base_fields), Value::Object(extra_fields)) = (base.as_object_mut(), extra) {
        base_fields.extend(extra_fields);
    }
    Node::from(base)
}

/// A document describing a single file, nothing more.
pub fn minimal() -> Node {
    merge(
        basic_document("document name"),
        json!({
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()]
            }],
            "documentDescribes": ["SPDXRef-somefile"]
        }),
    )
}

/// Document-level properties: creators, comments, an annotation, and an
/// external document reference.
pub fn document() -> Node {
    merge(
        basic_document("document name"),
        json!({
            "comment": "document comment",
            "creationInfo": {
                "created": "2022-01-01T00:00:00Z",
                "creators": ["Tool: test-tool", "Person: Jane Doe (jane.doe@example.com)"],
                "comment": "creation comment",
                "licenseListVersion": "3.7"
            },
            "annotations": [{
                "annotator": "Person: Document Reviewer (mail@mail.com)",
                "annotationDate": "2022-01-01T00:00:00Z",
                "annotationType": "REVIEW",
                "comment": "Document level annotation"
            }],
            "externalDocumentRefs": [{
                "externalDocumentId": "DocumentRef-externaldocumentid",
                "spdxDocument": "http://external.uri",
                "checksum": sha1_checksum()
            }],
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()]
            }],
            "documentDescribes": ["SPDXRef-somefile"]
        }),
    )
}

/// A file carrying the full set of file-level properties.
pub fn file() -> Node {
    merge(
        basic_document("file test document"),
        json!({
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()],
                "licenseConcluded": "GPL-2.0-only",
                "licenseInfoInFiles": ["GPL-2.0-only"],
                "licenseComments": "license comment in file",
                "copyrightText": "Copyright 2022 some guy",
                "comment": "file comment",
                "fileContributors": ["file contributor"],
                "noticeText": "notice text"
            }],
            "documentDescribes": ["SPDXRef-somefile"]
        }),
    )
}

/// Extracted licensing info referenced from a file.
pub fn extracted_license_info() -> Node {
    merge(
        basic_document("Extracted license information test document"),
        json!({
            "hasExtractedLicensingInfos": [{
                "licenseId": "LicenseRef-1",
                "extractedText": "some extracted text",
                "name": "some extracted license info name",
                "comment": "extracted license info comment",
                "seeAlsos": ["some (cross reference/see also) url", "another url"]
            }],
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()],
                "licenseConcluded": "LicenseRef-1",
                "copyrightText": "Copyright 2022 some guy"
            }],
            "documentDescribes": ["SPDXRef-somefile"]
        }),
    )
}

/// Two files related by a handful of relationships.
pub fn relationship() -> Node {
    let related = |relationship_type: &str| {
        json!({
            "spdxElementId": "SPDXRef-fileB",
            "relatedSpdxElement": "SPDXRef-fileA",
            "relationshipType": relationship_type,
            "comment": format!("comment on {relationship_type}")
        })
    };
    merge(
        basic_document("SPDX-tool-test"),
        json!({
            "files": [
                {
                    "SPDXID": "SPDXRef-fileA",
                    "fileName": "./fileA.c",
                    "checksums": [sha1_checksum()],
                    "licenseConcluded": "LGPL-2.0-only",
                    "copyrightText": "Copyright 2022 some person"
                },
                {
                    "SPDXID": "SPDXRef-fileB",
                    "fileName": "./fileB.c",
                    "checksums": [sha1_checksum()],
                    "licenseConcluded": "LGPL-2.0-only",
                    "copyrightText": "Copyright 2022 some person"
                }
            ],
            "relationships": [
                related("COPY_OF"),
                related("CONTAINS"),
                related("DEPENDS_ON"),
                related("GENERATED_FROM")
            ],
            "documentDescribes": ["SPDXRef-fileA", "SPDXRef-fileB"]
        }),
    )
}

/// A snippet taken from a file, with an annotation and ranges.
pub fn snippet() -> Node {
    merge(
        basic_document("Snippet test document"),
        json!({
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()],
                "licenseConcluded": "GPL-2.0-only",
                "copyrightText": "Copyright 2022 some guy"
            }],
            "snippets": [{
                "SPDXID": "SPDXRef-somesnippet",
                "name": "from linux kernel",
                "snippetFromFile": "SPDXRef-somefile",
                "licenseConcluded": "GPL-2.0-only",
                "licenseInfoInSnippets": ["LGPL-2.0-only AND LicenseRef-3"],
                "licenseComments": "snippy license comment",
                "copyrightText": "Copyright 2008-2010 John Smith",
                "comment": "snippy comment",
                "ranges": [
                    {
                        "startPointer": {"reference": "SPDXRef-somefile", "offset": 100},
                        "endPointer": {"reference": "SPDXRef-somefile", "offset": 400}
                    },
                    {
                        "startPointer": {"reference": "SPDXRef-somefile", "lineNumber": 30},
                        "endPointer": {"reference": "SPDXRef-somefile", "lineNumber": 40}
                    }
                ],
                "annotations": [{
                    "annotator": "Person: Snippet Annotator",
                    "annotationDate": "2011-01-29T18:30:22Z",
                    "annotationType": "OTHER",
                    "comment": "Snippet level annotation"
                }]
            }],
            "documentDescribes": ["SPDXRef-somesnippet"]
        }),
    )
}

/// A package exercising every package-level property: verification code,
/// external references, dual checksums, dates, and purpose.
pub fn package() -> Node {
    merge(
        basic_document("Package test document"),
        json!({
            "files": [{
                "SPDXID": "SPDXRef-somefile",
                "fileName": "./foo.txt",
                "checksums": [sha1_checksum()]
            }],
            "packages": [{
                "SPDXID": "SPDXRef-somepackage",
                "name": "package name",
                "versionInfo": "2.2.1",
                "packageFileName": "./foo.bar",
                "supplier": "Person: Jane Doe (jane.doe@example.com)",
                "originator": "Organization: some organization (contact@example.com)",
                "downloadLocation": "http://download.com",
                "filesAnalyzed": true,
                "hasFiles": ["SPDXRef-somefile"],
                "packageVerificationCode": {
                    "packageVerificationCodeValue": SHA1_VALUE,
                    "packageVerificationCodeExcludedFiles": ["./some.file"]
                },
                "checksums": [
                    sha1_checksum(),
                    {"algorithm": "MD5", "checksumValue": "624c1abb3664f4b35547e7c73864ad24"}
                ],
                "homepage": "http://home.page",
                "sourceInfo": "source information",
                "licenseConcluded": "GPL-2.0-only",
                "licenseInfoFromFiles": ["GPL-2.0-only"],
                "licenseDeclared": "GPL-2.0-only",
                "licenseComments": "license comment",
                "copyrightText": "Copyright 2022 Jane Doe",
                "summary": "package summary",
                "description": "package description",
                "comment": "package comment",
                "externalRefs": [{
                    "referenceCategory": "OTHER",
                    "referenceType": "http://reference.type",
                    "referenceLocator": "reference/locator",
                    "comment": "external reference comment"
                }],
                "attributionTexts": ["package attribution"],
                "primaryPackagePurpose": "LIBRARY",
                "releaseDate": "2015-01-01T00:00:00Z",
                "builtDate": "2014-01-01T00:00:00Z",
                "validUntilDate": "2022-01-01T00:00:00Z",
                "annotations": [{
                    "annotator": "Person: Package Annotator",
                    "annotationDate": "2022-01-01T00:00:00Z",
                    "annotationType": "OTHER",
                    "comment": "Package level annotation"
                }]
            }],
            "documentDescribes": ["SPDXRef-somepackage"]
        }),
    )
}

/// License expressions across files, a snippet, a package, and two
/// extracted licensing infos.
pub fn license() -> Node {
    merge(
        basic_document("License test document"),
        json!({
            "hasExtractedLicensingInfos": [
                {
                    "licenseId": "LicenseRef-1",
                    "extractedText": "extracted text",
                    "name": "extracted license info name",
                    "comment": "extracted license info comment",
                    "seeAlsos": ["http://see.also", "http://extracted.license"]
                },
                {
                    "licenseId": "LicenseRef-two",
                    "extractedText": "extracted text",
                    "name": "extracted license info name",
                    "comment": "extracted license info comment",
                    "seeAlsos": ["http://another.license"]
                }
            ],
            "files": [
                {
                    "SPDXID": "SPDXRef-fileA",
                    "fileName": "./package/faa.txt",
                    "checksums": [sha1_checksum()],
                    "licenseConcluded": "LicenseRef-1 OR LicenseRef-two",
                    "licenseInfoInFiles": ["LicenseRef-1", "LicenseRef-two"]
                },
                {
                    "SPDXID": "SPDXRef-fileB",
                    "fileName": "./package/fbb.txt",
                    "checksums": [sha1_checksum()],
                    "licenseConcluded": "Aladdin WITH Classpath-exception-2.0",
                    "licenseInfoInFiles": ["Aladdin", "DL-DE-BY-2.0"]
                }
            ],
            "snippets": [{
                "SPDXID": "SPDXRef-somesnippet",
                "name": "snippet name",
                "snippetFromFile": "SPDXRef-fileB",
                "licenseConcluded": "Aladdin",
                "licenseInfoInSnippets": ["Aladdin", "DL-DE-BY-2.0"],
                "ranges": [{
                    "startPointer": {"reference": "SPDXRef-fileB", "offset": 100},
                    "endPointer": {"reference": "SPDXRef-fileB", "offset": 200}
                }]
            }],
            "packages": [{
                "SPDXID": "SPDXRef-somepackage",
                "name": "package name",
                "downloadLocation": "NOASSERTION",
                "licenseConcluded":
                    "(LicenseRef-1 WITH u-boot-exception-2.0 OR LicenseRef-two) \
                     AND Aladdin WITH Classpath-exception-2.0",
                "licenseDeclared":
                    "(LicenseRef-1 OR LicenseRef-two) AND Aladdin WITH Classpath-exception-2.0",
                "licenseInfoFromFiles": [
                    "LicenseRef-1 OR LicenseRef-two",
                    "Aladdin WITH Classpath-exception-2.0"
                ],
                "packageVerificationCode": {
                    "packageVerificationCodeValue": SHA1_VALUE
                },
                "hasFiles": ["SPDXRef-fileA", "SPDXRef-fileB"]
            }],
            "documentDescribes": ["SPDXRef-somepackage"]
        }),
    )
}

/// The smallest package-centric SBOM: one package with analysis turned
/// off.
pub fn baseline_sbom() -> Node {
    merge(
        basic_document("Baseline SBOM document"),
        json!({
            "packages": [{
                "SPDXID": "SPDXRef-somepackage",
                "name": "package name",
                "versionInfo": "2.2.1",
                "supplier": "Person: Jane Doe (jane.doe@example.com)",
                "filesAnalyzed": false,
                "checksums": [sha1_checksum()]
            }],
            "documentDescribes": ["SPDXRef-somepackage"]
        }),
    )
}
