use ethers::contract::abigen;

abigen!(
    Journal,
    r"[
        function createPost(string calldata title, string calldata content) external

        function getPostCount() external view returns (uint256)

        function getPost(uint256 index) external view returns (string memory, string memory, address, uint256)
    ]"
);
