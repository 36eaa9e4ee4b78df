//! The bundled blog catalog, newest first, and the landing-page showcase.

use crate::catalog::{Catalog, ContentBlock, Post};
use crate::showcase::{Advisory, Certification, Severity, Stat};

/// The catalog shipped with the application.
pub fn bundled() -> Catalog {
    Catalog::from_trusted(posts())
}

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn posts() -> Vec<Post> {
    vec![
        Post {
            slug: "oauth2-vulnerability-analysis".to_string(),
            title: "Breaking Down OAuth 2.0: Common Vulnerabilities and Mitigation Strategies"
                .to_string(),
            date: "March 15, 2024".to_string(),
            tags: tags(&["OAuth", "Authentication", "Web Security"]),
            excerpt: "An in-depth analysis of OAuth 2.0 implementation vulnerabilities and how to protect against them.".to_string(),
            content: vec![
                ContentBlock::paragraph(
                    "OAuth 2.0 has become the industry standard for API authorization, but its flexibility can lead to security vulnerabilities when implemented incorrectly. In this post, we'll examine common OAuth 2.0 security issues and their solutions.",
                ),
                ContentBlock::heading(2, "Common Vulnerabilities"),
                ContentBlock::paragraph(
                    "One of the most critical vulnerabilities in OAuth 2.0 implementations is the improper handling of state parameters, which can lead to CSRF attacks.",
                ),
                ContentBlock::code(
                    "javascript",
                    r#"// Vulnerable implementation
app.get('/oauth/callback', (req, res) => {
  const { code } = req.query;
  // Missing state parameter validation
  exchangeCodeForToken(code);
});

// Secure implementation
app.get('/oauth/callback', (req, res) => {
  const { code, state } = req.query;
  if (!validateState(state)) {
    return res.status(400).send('Invalid state parameter');
  }
  exchangeCodeForToken(code);
});"#,
                ),
                ContentBlock::heading(2, "PKCE Implementation"),
                ContentBlock::paragraph(
                    "Proof Key for Code Exchange (PKCE) is essential for mobile and native applications to prevent authorization code interception attacks.",
                ),
                ContentBlock::code(
                    "javascript",
                    r#"// Generate PKCE challenge
const codeVerifier = generateRandomString(64);
const codeChallenge = base64UrlEncode(
  await crypto.subtle.digest('SHA-256', 
    new TextEncoder().encode(codeVerifier)
  )
);"#,
                ),
            ],
        },
        Post {
            slug: "kubernetes-security-hardening".to_string(),
            title: "Kubernetes Security Hardening: Best Practices and Common Pitfalls".to_string(),
            date: "March 1, 2024".to_string(),
            tags: tags(&["Kubernetes", "Cloud Security", "Container Security"]),
            excerpt: "Essential security measures for hardening Kubernetes clusters in production environments.".to_string(),
            content: vec![
                ContentBlock::paragraph(
                    "Kubernetes security requires a comprehensive approach covering multiple layers of the container orchestration stack.",
                ),
                ContentBlock::heading(2, "Network Policies"),
                ContentBlock::code(
                    "yaml",
                    r#"apiVersion: networking.k8s.io/v1
kind: NetworkPolicy
metadata:
  name: default-deny-ingress
spec:
  podSelector: {}
  policyTypes:
  - Ingress"#,
                ),
                ContentBlock::paragraph(
                    "Implementing proper network policies is crucial for segmenting communication between pods and limiting potential attack surfaces.",
                ),
                ContentBlock::heading(2, "Pod Security Policies"),
                ContentBlock::code(
                    "yaml",
                    r#"apiVersion: policy/v1beta1
kind: PodSecurityPolicy
metadata:
  name: restricted
spec:
  privileged: false
  seLinux:
    rule: RunAsAny
  runAsUser:
    rule: MustRunAsNonRoot"#,
                ),
            ],
        },
        Post {
            slug: "zero-day-hunting".to_string(),
            title: "Zero-Day Vulnerability Hunting: Methodology and Tools".to_string(),
            date: "February 28, 2024".to_string(),
            tags: tags(&["Vulnerability Research", "Zero-Day", "Binary Analysis"]),
            excerpt: "A detailed look into the process of discovering zero-day vulnerabilities in modern software.".to_string(),
            content: vec![
                ContentBlock::paragraph(
                    "Zero-day vulnerability research requires a systematic approach combining static analysis, dynamic testing, and creative thinking.",
                ),
                ContentBlock::heading(2, "Static Analysis Techniques"),
                ContentBlock::code(
                    "python",
                    r#"from angr import Project

# Load binary for analysis
proj = Project('target_binary')
cfg = proj.analyses.CFG()

# Find potential vulnerability points
for node in cfg.nodes():
    if "strcpy" in node.name:
        print(f"Potential buffer overflow at {node.addr}")
"#,
                ),
                ContentBlock::heading(2, "Fuzzing Strategy"),
                ContentBlock::paragraph(
                    "Modern fuzzing techniques combine coverage-guided testing with intelligent mutation strategies to uncover complex vulnerabilities.",
                ),
            ],
        },
        Post {
            slug: "web3-security".to_string(),
            title: "Web3 Security: Smart Contract Vulnerabilities and Auditing".to_string(),
            date: "February 20, 2024".to_string(),
            tags: tags(&["Web3", "Blockchain", "Smart Contracts"]),
            excerpt: "Essential guide to identifying and preventing smart contract vulnerabilities."
                .to_string(),
            content: vec![
                ContentBlock::paragraph(
                    "Smart contract security requires specialized knowledge of blockchain technology and common vulnerability patterns.",
                ),
                ContentBlock::heading(2, "Reentrancy Attacks"),
                ContentBlock::code(
                    "solidity",
                    r#"// Vulnerable contract
contract Vulnerable {
    mapping(address => uint) public balances;
    
    function withdraw() public {
        uint bal = balances[msg.sender];
        require(bal > 0);
        (bool sent, ) = msg.sender.call{value: bal}("");
        require(sent);
        balances[msg.sender] = 0;
    }
}

// Secure implementation
contract Secure {
    mapping(address => uint) public balances;
    
    function withdraw() public {
        uint bal = balances[msg.sender];
        require(bal > 0);
        balances[msg.sender] = 0;
        (bool sent, ) = msg.sender.call{value: bal}("");
        require(sent);
    }
}"#,
                ),
            ],
        },
        Post {
            slug: "api-security-testing".to_string(),
            title: "Advanced API Security Testing: Beyond the Basics".to_string(),
            date: "February 15, 2024".to_string(),
            tags: tags(&["API Security", "Penetration Testing", "Authentication"]),
            excerpt: "Comprehensive guide to testing API security, including authentication, authorization, and data validation.".to_string(),
            content: vec![
                ContentBlock::heading(2, "JWT Token Analysis"),
                ContentBlock::code(
                    "python",
                    r#"import jwt

# Decode JWT without verification
token = "eyJ0...";
decoded = jwt.decode(token, verify=False)

# Check for algorithm confusion
header = jwt.get_unverified_header(token)
if header['alg'] == 'none':
    print("Vulnerable to algorithm confusion")"#,
                ),
                ContentBlock::heading(2, "GraphQL Security"),
                ContentBlock::code(
                    "graphql",
                    r#"# Introspection query to expose schema
query IntrospectionQuery {
  __schema {
    types {
      name
      fields {
        name
        type {
          name
        }
      }
    }
  }
}"#,
                ),
            ],
        },
        Post {
            slug: "cloud-security-architecture".to_string(),
            title: "Designing Secure Cloud Architecture: A Defense-in-Depth Approach".to_string(),
            date: "February 10, 2024".to_string(),
            tags: tags(&["Cloud Security", "Architecture", "AWS"]),
            excerpt: "Best practices for designing secure cloud infrastructure using multiple security layers.".to_string(),
            content: vec![
                ContentBlock::heading(2, "Network Segmentation"),
                ContentBlock::code(
                    "hcl",
                    r#"# Terraform configuration for VPC segmentation
resource "aws_vpc" "main" {
  cidr_block = "10.0.0.0/16"
  
  tags = {
    Name = "production"
  }
}

resource "aws_subnet" "private" {
  vpc_id     = aws_vpc.main.id
  cidr_block = "10.0.1.0/24"
}"#,
                ),
                ContentBlock::heading(2, "IAM Best Practices"),
                ContentBlock::code(
                    "json",
                    r#"{
  "Version": "2012-10-17",
  "Statement": [
    {
      "Effect": "Allow",
      "Action": [
        "s3:GetObject",
        "s3:ListBucket"
      ],
      "Resource": [
        "arn:aws:s3:::my-bucket",
        "arn:aws:s3:::my-bucket/*"
      ],
      "Condition": {
        "IpAddress": {
          "aws:SourceIp": "192.0.2.0/24"
        }
      }
    }
  ]
}"#,
                ),
            ],
        },
    ]
}

pub fn stats() -> &'static [Stat] {
    &[
        Stat {
            label: "Security Audits",
            value: "100+",
        },
        Stat {
            label: "Vulnerabilities Found",
            value: "300+",
        },
        Stat {
            label: "Systems Protected",
            value: "20+",
        },
        Stat {
            label: "Zero-Day Discoveries",
            value: "5",
        },
    ]
}

pub fn certifications() -> &'static [Certification] {
    &[
        Certification {
            title: "OSCP",
            full_name: "Offensive Security Certified Professional",
            date: "2023",
            description: "Advanced penetration testing certification demonstrating practical exploitation skills and methodology.",
        },
        Certification {
            title: "CEH",
            full_name: "Certified Ethical Hacker",
            date: "2022",
            description: "Comprehensive certification covering ethical hacking methodologies, tools, and countermeasures.",
        },
        Certification {
            title: "CISSP",
            full_name: "Certified Information Systems Security Professional",
            date: "2021",
            description: "Industry-leading certification in information security management and operations.",
        },
    ]
}

/// Disclosed advisories, most recent first.
pub fn advisories() -> &'static [Advisory] {
    &[
        Advisory {
            severity: Severity::Critical,
            platform: "Major Cloud Provider",
            bounty: "$7,500",
            description: "Authentication bypass in OAuth2 implementation allowing unauthorized access to user accounts.",
            impact: "Potential unauthorized access to millions of user accounts",
            status: "Patched",
            date: "May 2024",
        },
        Advisory {
            severity: Severity::High,
            platform: "E-commerce Platform",
            bounty: "$5,000",
            description: "SQL injection vulnerability in product search functionality leading to potential data exfiltration.",
            impact: "Access to customer records and payment information",
            status: "Patched",
            date: "February 2024",
        },
        Advisory {
            severity: Severity::Critical,
            platform: "Identity Provider",
            bounty: "$2,000",
            description: "Race condition in MFA implementation allowing bypass of two-factor authentication.",
            impact: "Complete account takeover possibility",
            status: "Patched",
            date: "December 2023",
        },
    ]
}
